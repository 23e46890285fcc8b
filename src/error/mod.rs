//! Ошибки крейта.
//!
//! Ошибки кодека живут в крейте `nbtree-error` и переэкспортируются
//! отсюда. Здесь определены только ошибки, завязанные на типы кодека.

pub mod list;

pub use list::ListError;
pub use nbtree_error::*;
