//! Decode oct-encoded unit vectors from compressed attribute streams.
//!
//! Oct encoding stores a unit direction (typically a vertex normal) as two
//! quantized coordinates on an unfolded octahedron. This crate turns such a
//! pair back into a normalized vector. Reading the pairs out of a buffer is
//! left to the caller.
//!
//! # Design principles
//!
//! - **Pure**: No I/O and no shared state; every function may be called
//!   from any thread
//! - **Explicit errors**: Out-of-range input is either rejected or clamped,
//!   as the caller chooses
//!
//! # Key functions
//!
//! - [`decode_unit_vector`]: Strict decode of one `(x, y)` pair
//! - [`decode_unit_vector_clamped`]: Permissive decode that clamps coordinates
//! - [`denormalize_snorm`]: Map a quantized value to `[-1, 1]`
//! - [`OctDecoder`]: Decoder bound to a [`RangeMax`] and a [`RangePolicy`]

mod error;

pub mod decoder;
pub mod octahedral;
pub mod range;
pub mod snorm;

pub use decoder::{OctDecoder, RangePolicy};
pub use error::{DecodeError, DecodeResult};
pub use octahedral::{decode_unit_vector, decode_unit_vector_clamped};
pub use range::RangeMax;
pub use snorm::{denormalize_snorm, sign_or_positive};
