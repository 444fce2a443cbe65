//! Sequential decoder for the dataset layout described in [`crate::dataset`].

use byteorder::{ByteOrder, LE};

use crate::dataset::{
    DatasetHeader, HEADER_SIZE, MAX_RECORD_COUNT, RECORD_FIXED_SIZE, RECORD_LEN_SIZE, Record,
};
use crate::error::{Error, Result};
use crate::verify_data;

/// Decodes a decompressed dataset buffer into [`Record`]s in file order.
///
/// Decoding is strictly sequential: every record carries its own body length,
/// which locates the next record. The decoder is an iterator of
/// `Result<Record>`; after the first error it yields nothing further. Once
/// `record_count` records have been produced, any bytes left in the buffer
/// are reported as an error.
pub struct DatasetDecoder<'a> {
    buf: &'a [u8],
    header: DatasetHeader,
    offset: usize,
    decoded: u32,
    failed: bool,
}

impl<'a> DatasetDecoder<'a> {
    /// Creates a decoder over `buf`, reading and validating the header.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error if the buffer is shorter than the
    /// header or declares more records than the 16-bit mark space can address.
    pub fn new(buf: &'a [u8]) -> Result<Self> {
        verify_data!("dataset header", buf.len() >= HEADER_SIZE);
        let header = DatasetHeader {
            record_count: LE::read_u32(&buf[0..4]),
            word_count: LE::read_u32(&buf[4..8]),
        };
        verify_data!(
            "record_count",
            header.record_count as usize <= MAX_RECORD_COUNT
        );
        Ok(DatasetDecoder {
            buf,
            header,
            offset: HEADER_SIZE,
            decoded: 0,
            failed: false,
        })
    }

    pub fn header(&self) -> DatasetHeader {
        self.header
    }

    /// Byte offset of the next record within the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn decode_next(&mut self) -> Result<Record<'a>> {
        let rest = &self.buf[self.offset..];
        verify_data!("record length", rest.len() >= RECORD_LEN_SIZE);
        let body_len = LE::read_u16(&rest[..RECORD_LEN_SIZE]) as usize;
        let rest = &rest[RECORD_LEN_SIZE..];
        verify_data!("record body", rest.len() >= body_len);
        verify_data!("record body", body_len >= RECORD_FIXED_SIZE);

        let body = &rest[..body_len];
        let codepoint = LE::read_u32(&body[0..4]);
        let name_len = LE::read_u16(&body[4..6]) as usize;
        verify_data!("name length", RECORD_FIXED_SIZE + name_len <= body_len);

        let text = &body[RECORD_FIXED_SIZE..];
        let name = std::str::from_utf8(&text[..name_len]).map_err(|e| {
            Error::invalid_format(format!("name of U+{codepoint:04X}"), e.to_string())
        })?;
        let aliases = std::str::from_utf8(&text[name_len..]).map_err(|e| {
            Error::invalid_format(format!("aliases of U+{codepoint:04X}"), e.to_string())
        })?;

        self.offset += RECORD_LEN_SIZE + body_len;
        self.decoded += 1;
        Ok(Record {
            codepoint,
            name,
            aliases,
        })
    }
}

impl<'a> Iterator for DatasetDecoder<'a> {
    type Item = Result<Record<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if self.decoded == self.header.record_count {
            if self.offset == self.buf.len() {
                return None;
            }
            self.failed = true;
            return Some(Err(Error::invalid_format(
                "dataset",
                format!(
                    "{} trailing bytes after {} records",
                    self.buf.len() - self.offset,
                    self.decoded
                ),
            )));
        }
        let result = self.decode_next();
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.header.record_count - self.decoded) as usize;
        (0, Some(remaining + 1))
    }
}
