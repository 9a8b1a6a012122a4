/// Sidecar written by `makeblastdb -parse_seqids` next to nucleotide databases.
pub const NUCLEOTIDE_SIDECAR_EXT: &str = "nsd";
/// Sidecar written by `makeblastdb -parse_seqids` next to protein databases.
pub const PROTEIN_SIDECAR_EXT: &str = "psd";

pub const BLASTDBCMD: &str = "blastdbcmd";

/// Id prefixes the search tool already understands; never reported as problematic.
pub const ALLOWED_ID_PREFIXES: [&str; 2] = ["gi", "bbs"];

/// Offending ids shown per finding before the list is truncated.
pub const MAX_SAMPLE_IDS: usize = 5;

pub const DIAGNOSE_STEPS: usize = 6;
