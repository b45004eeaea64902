pub mod util_hex;
pub mod vectors;
