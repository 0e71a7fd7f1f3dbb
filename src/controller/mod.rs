pub mod csv_export;
pub mod session;
pub mod share;
pub mod timer;
pub mod transfer;
