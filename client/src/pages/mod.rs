//! Page modules mounted into server-rendered containers.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state signals and controller wiring and delegates
//! rendering details to `components`.

pub mod expenses;
