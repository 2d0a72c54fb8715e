//! livelist - a growable array list with cursors and live sub-list windows.
//!
//! - [`ArrayList`] owns the elements.
//! - [`ListCursor`] walks any [`Sequence`] in both directions and edits it
//!   relative to its position.
//! - [`SubList`] is a live `[offset, bound)` window over a list or over
//!   another window; edits made through it (or through its
//!   [`SubListCursor`]) land in the parent and keep the window's bound
//!   up to date.
//!
//! # Quick Start
//!
//! ```
//! use livelist::{ArrayList, Cursor, Sequence};
//!
//! let mut list: ArrayList<&str> = ["A", "B", "C", "D"].into_iter().collect();
//!
//! let mut view = list.sub_list(1, 3).unwrap();
//! view.insert(1, "X").unwrap();
//! assert_eq!(view.to_vec(), vec!["B", "X", "C"]);
//!
//! let mut cursor = view.cursor();
//! cursor.next().unwrap();
//! cursor.remove().unwrap();
//! drop(cursor);
//! assert_eq!(view.len(), 2);
//!
//! assert_eq!(list.to_vec(), vec!["A", "X", "C", "D"]);
//! ```

pub mod array_list;
pub mod cursor;
pub mod error;
pub mod sequence;
pub mod sub_list;

pub use array_list::ArrayList;
pub use cursor::{Cursor, Delta, ListCursor};
pub use error::ListError;
pub use sequence::{Iter, Sequence, element_hash, fold_hash};
pub use sub_list::{SubList, SubListCursor};
