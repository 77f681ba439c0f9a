/// Discriminator key carried by every unit dictionary
pub const UNIT_NAME_KEY: &str = "unit_name";
/// Placeholder used in errors when the discriminator itself is unreadable
pub const UNKNOWN_UNIT_NAME: &str = "<unknown>";

/// Deterministic intent parser: maximum number of generated queries per intent
pub const DEFAULT_MAX_QUERIES: usize = 100;
/// Deterministic intent parser: maximum length of a generated pattern
pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 1000;

/// Logistic regression classifier: weight of noise utterances
pub const DEFAULT_NOISE_REWEIGHT_FACTOR: f64 = 1.0;
/// Featurizer: feature selection p-value threshold
pub const DEFAULT_PVALUE_THRESHOLD: f64 = 0.4;

/// CRF regularization coefficients and training algorithm
pub const DEFAULT_CRF_C1: f64 = 0.1;
pub const DEFAULT_CRF_C2: f64 = 0.1;
pub const DEFAULT_CRF_ALGORITHM: &str = "lbfgs";

/// Data augmentation minimums
pub const DEFAULT_INTENT_MIN_UTTERANCES: usize = 20;
pub const DEFAULT_INTENT_NOISE_FACTOR: usize = 5;
pub const DEFAULT_SLOT_FILLER_MIN_UTTERANCES: usize = 200;
pub const DEFAULT_CAPITALIZATION_RATIO: f64 = 0.2;

/// Resource names referenced by the default slot filler features
pub const DEFAULT_COMMON_WORDS_GAZETTEER: &str = "top_10000_words_stemmed";
pub const DEFAULT_WORD_CLUSTERS: &str = "brown_clusters";
