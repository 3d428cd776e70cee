//! Output formatting: present dashboard data as tables.
//!
//! - **DataTable**: headers, rows and an optional footer, all as strings
//! - **TableRow**: a label plus formatted values
//!
//! All filtering and sorting happens in the query stage; this module only
//! turns values into text.

pub mod table;

pub use table::{DataTable, TableRow};
