//! Daemon data transfer objects.
//!
//! One type per response shape. Every struct tolerates missing fields and
//! ignores unknown ones so a newer daemon does not break decoding; explicit
//! nulls decode like missing fields.

mod lenient;
pub mod response;
pub mod timestamp;
