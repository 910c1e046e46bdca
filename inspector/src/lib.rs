pub mod inspect;
pub mod list;

pub use inspect::*;
pub use list::*;

#[cfg(test)]
mod testing;
