//! The compressed dataset compiled into the crate.

use crate::error::{Error, Result};

/// zstd-compressed character-name dataset.
pub static COMPRESSED_DATASET: &[u8] = include_bytes!("../../data/names.bin.zst");

/// Compression level used by [`compress`].
pub const DEFAULT_COMPRESSION_LEVEL: i32 = 19;

/// Decompresses a zstd-compressed dataset.
pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>> {
    zstd::stream::decode_all(compressed).map_err(|e| Error::io("dataset decompression", e))
}

/// Compresses an encoded dataset into the form expected by [`decompress`].
pub fn compress(dataset: &[u8], level: i32) -> Result<Vec<u8>> {
    zstd::stream::encode_all(dataset, level).map_err(|e| Error::io("dataset compression", e))
}

/// Decompresses the embedded dataset.
pub fn load() -> Result<Vec<u8>> {
    let buf = decompress(COMPRESSED_DATASET)?;
    log::debug!(
        "decompressed character name dataset: {} -> {} bytes",
        COMPRESSED_DATASET.len(),
        buf.len()
    );
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DatasetDecoder, DatasetWriter};

    #[test]
    fn test_embedded_dataset_decodes() {
        let buf = load().unwrap();
        let decoder = DatasetDecoder::new(&buf).unwrap();
        let header = decoder.header();
        let mut count = 0u32;
        for record in decoder {
            let record = record.unwrap();
            assert!(char::from_u32(record.codepoint).is_some());
            count += 1;
        }
        assert_eq!(count, header.record_count);
        assert!(header.word_count > 0);
    }

    #[test]
    fn test_compress_decompress() {
        let mut writer = DatasetWriter::new();
        writer.push(0x1f41d, "honeybee", &["bee"]).unwrap();
        let buf = writer.finish();
        let compressed = compress(&buf, DEFAULT_COMPRESSION_LEVEL).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), buf);
    }

    #[test]
    fn test_decompress_garbage() {
        assert!(decompress(b"not a zstd frame").is_err());
    }
}
