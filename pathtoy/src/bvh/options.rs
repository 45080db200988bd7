/// Knobs for [`super::Bvh::build()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BvhOptions {
    leaf_threshold: usize,
    strategy: BvhStrategy,
    parallel: bool,
}

impl BvhOptions {
    /// Maximum number of triangles per leaf used by the demo scenes.
    pub const DEFAULT_LEAF_THRESHOLD: usize = 8;

    /// Sets the maximum number of triangles a leaf can hold; zero is treated
    /// as one.
    pub fn with_leaf_threshold(mut self, leaf_threshold: usize) -> Self {
        self.leaf_threshold = leaf_threshold.max(1);
        self
    }

    pub fn with_strategy(mut self, strategy: BvhStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Evaluates splitting axes on separate threads; produces the same tree
    /// as the sequential build.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn leaf_threshold(&self) -> usize {
        self.leaf_threshold
    }

    pub fn strategy(&self) -> BvhStrategy {
        self.strategy
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

impl Default for BvhOptions {
    fn default() -> Self {
        Self {
            leaf_threshold: Self::DEFAULT_LEAF_THRESHOLD,
            strategy: Default::default(),
            parallel: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BvhStrategy {
    /// Full (non-binned) surface area heuristic - slower to build, better to
    /// traverse.
    #[default]
    Sah,

    /// Splits at the median along the longest axis.
    Median,
}
