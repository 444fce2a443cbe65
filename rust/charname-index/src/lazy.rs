//! One-time, thread-safe construction of a [`NameIndex`].

use std::fmt;
use std::sync::OnceLock;

use ahash::AHashSet;

use crate::builder::NameIndexConfig;
use crate::dataset::embedded;
use crate::error::Result;
use crate::index::NameIndex;

/// Function producing the decompressed bytes of a dataset.
pub type DatasetLoader = Box<dyn Fn() -> Result<Vec<u8>> + Send + Sync>;

/// Where a [`LazyNameIndex`] reads its dataset from.
pub enum DatasetSource {
    /// The dataset compiled into this crate.
    Embedded,
    /// A zstd-compressed dataset held in memory.
    Compressed(Vec<u8>),
    /// A function returning the decompressed dataset.
    Loader(DatasetLoader),
}

impl DatasetSource {
    /// Wraps a loader function returning decompressed dataset bytes.
    pub fn loader<F>(f: F) -> DatasetSource
    where
        F: Fn() -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        DatasetSource::Loader(Box::new(f))
    }

    /// Produces the decompressed dataset bytes.
    pub fn load(&self) -> Result<Vec<u8>> {
        match self {
            DatasetSource::Embedded => embedded::load(),
            DatasetSource::Compressed(bytes) => embedded::decompress(bytes),
            DatasetSource::Loader(f) => f(),
        }
    }
}

impl fmt::Debug for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Embedded => f.write_str("Embedded"),
            DatasetSource::Compressed(bytes) => write!(f, "Compressed({} bytes)", bytes.len()),
            DatasetSource::Loader(_) => f.write_str("Loader"),
        }
    }
}

/// A [`NameIndex`] that is built from its dataset on first use.
///
/// The first caller of [`get`](LazyNameIndex::get) (directly or through
/// [`query`](LazyNameIndex::query) / [`lookup_name`](LazyNameIndex::lookup_name))
/// loads, decodes and indexes the dataset. Callers arriving while the build is
/// running block until it completes; all of them then observe the same index.
/// The dataset is loaded at most once for the lifetime of the instance.
///
/// A dataset that fails to load or decode is treated as a defect of the
/// compiled asset: the initializing call panics with the error, and the index
/// stays unbuilt.
#[derive(Debug)]
pub struct LazyNameIndex {
    cell: OnceLock<NameIndex>,
    source: DatasetSource,
    config: NameIndexConfig,
}

impl LazyNameIndex {
    pub fn new(source: DatasetSource, config: NameIndexConfig) -> LazyNameIndex {
        LazyNameIndex {
            cell: OnceLock::new(),
            source,
            config,
        }
    }

    /// Lazy index over the embedded dataset with the default configuration.
    pub const fn embedded() -> LazyNameIndex {
        LazyNameIndex {
            cell: OnceLock::new(),
            source: DatasetSource::Embedded,
            config: NameIndexConfig::DEFAULT,
        }
    }

    /// Returns the index, building it first if this is the first call.
    ///
    /// # Panics
    ///
    /// Panics if the dataset cannot be loaded or is malformed.
    pub fn get(&self) -> &NameIndex {
        self.cell.get_or_init(|| match self.build() {
            Ok(index) => index,
            Err(e) => panic!("invalid character name dataset: {e}"),
        })
    }

    /// Returns the index if it has already been built.
    pub fn get_if_built(&self) -> Option<&NameIndex> {
        self.cell.get()
    }

    pub fn is_built(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    /// See [`NameIndex::lookup_name`].
    pub fn lookup_name(&self, codepoint: u32) -> &str {
        self.get().lookup_name(codepoint)
    }

    /// See [`NameIndex::query`].
    pub fn query(&self, text: &str) -> AHashSet<u32> {
        self.get().query(text)
    }

    fn build(&self) -> Result<NameIndex> {
        log::debug!("building character name index from {:?}", self.source);
        let buf = self.source.load()?;
        NameIndex::from_dataset(&buf, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetWriter;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};

    fn sample_dataset() -> Vec<u8> {
        let mut writer = DatasetWriter::new();
        writer
            .push(0x2026, "horizontal ellipsis", &["horiz"])
            .unwrap();
        writer
            .push(0x2b2c, "black horizontal ellipse", &["horiz"])
            .unwrap();
        writer.push(0x1f41d, "honeybee", &["bee"]).unwrap();
        writer.finish()
    }

    fn counting_index(builds: Arc<AtomicUsize>) -> LazyNameIndex {
        let dataset = sample_dataset();
        LazyNameIndex::new(
            DatasetSource::loader(move || {
                builds.fetch_add(1, Ordering::SeqCst);
                Ok(dataset.clone())
            }),
            NameIndexConfig::default(),
        )
    }

    #[test]
    fn test_builds_on_first_use() {
        let builds = Arc::new(AtomicUsize::new(0));
        let lazy = counting_index(Arc::clone(&builds));
        assert!(!lazy.is_built());
        assert!(lazy.get_if_built().is_none());
        assert_eq!(builds.load(Ordering::SeqCst), 0);

        assert_eq!(lazy.lookup_name(0x1f41d), "honeybee");
        assert!(lazy.is_built());
        assert_eq!(lazy.query("horiz ell").len(), 2);
        assert_eq!(lazy.lookup_name(0x41), "");
        assert_eq!(builds.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_use_builds_once() {
        const THREADS: usize = 16;
        let builds = Arc::new(AtomicUsize::new(0));
        let lazy = Arc::new(counting_index(Arc::clone(&builds)));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles = (0..THREADS)
            .map(|i| {
                let lazy = Arc::clone(&lazy);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    if i % 2 == 0 {
                        lazy.query("horiz ell")
                    } else {
                        let name = lazy.lookup_name(0x2026).to_string();
                        assert_eq!(name, "horizontal ellipsis");
                        lazy.query("horiz ell")
                    }
                })
            })
            .collect::<Vec<_>>();

        let results = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| *r == results[0]));
        let expected = [0x2026, 0x2b2c].into_iter().collect::<AHashSet<u32>>();
        assert_eq!(results[0], expected);
    }

    #[test]
    fn test_compressed_source() {
        let compressed =
            embedded::compress(&sample_dataset(), embedded::DEFAULT_COMPRESSION_LEVEL).unwrap();
        let len = compressed.len();
        let lazy = LazyNameIndex::new(
            DatasetSource::Compressed(compressed),
            NameIndexConfig::default(),
        );
        let DatasetSource::Compressed(bytes) = lazy.source() else {
            panic!("unexpected source {:?}", lazy.source());
        };
        assert_eq!(bytes.len(), len);
        assert_eq!(
            format!("{:?}", lazy.source()),
            format!("Compressed({len} bytes)")
        );
        assert!(lazy.query("bee").contains(&0x1f41d));
    }

    #[test]
    #[should_panic(expected = "invalid character name dataset")]
    fn test_corrupt_dataset_panics() {
        let lazy = LazyNameIndex::new(
            DatasetSource::loader(|| Ok(vec![1, 0, 0, 0, 0, 0, 0, 0, 9])),
            NameIndexConfig::default(),
        );
        lazy.get();
    }

    #[test]
    #[should_panic(expected = "invalid character name dataset")]
    fn test_failing_loader_panics() {
        let lazy = LazyNameIndex::new(
            DatasetSource::loader(|| {
                Err(Error::io(
                    "dataset",
                    std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                ))
            }),
            NameIndexConfig::default(),
        );
        lazy.lookup_name(0x41);
    }
}
