//! Source parsers.
//!
//! - `jsx`: swc front-end for the ECMAScript family (JS, JSX, TS, TSX)

pub mod jsx;
