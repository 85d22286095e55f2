pub mod critical_path;
pub mod forward_pass;
pub mod rollup;
