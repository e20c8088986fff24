pub mod amounts;
pub mod common;
pub mod recipients;

pub use amounts::{aggregate, parse_amounts, AggregationResult};
pub use common::{
    checksum_address, parse_address, read_text_input, split_entries, write_file_atomic,
};
pub use recipients::{parse_recipients, resolve_recipients};
