//! The optional-value container.
//!
//! [`Optional<T>`] either holds one value (`Present`) or none (`Absent`).
//! Instead of signalling "no value" with a sentinel, callers transform the
//! container with combinators and decide at the end how to leave it:
//!
//! - force the value out with [`unwrap`](Optional::unwrap),
//!   [`try_unwrap`](Optional::try_unwrap) or their `expect` variants,
//! - fold it into a plain value with [`unwrap_or`](Optional::unwrap_or),
//!   [`map_or`](Optional::map_or) and friends,
//! - or dispatch on the variant through the [match engine](crate::matching).
//!
//! # Laws
//!
//! `map` and `and_then` are lawful:
//!
//! ```text
//! present(v).map(f).map(g)  == present(v).map(|x| g(f(x)))
//! absent().map(f)           == absent()
//! present(v).and_then(f)    == f(v)
//! absent().and_then(f)      == absent()
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::Optional;
//!
//! let parsed: Optional<u8> = Optional::from("42".parse::<u8>().ok());
//! let doubled = parsed.and_then(|n| Optional::from(n.checked_mul(2)));
//!
//! assert_eq!(doubled, Optional::Present(84));
//! assert_eq!(doubled.to_string(), "Present(84)");
//! ```

mod convert;
mod core;

pub use self::convert::{IntoIter, Iter, IterMut};
pub use self::core::Optional;
