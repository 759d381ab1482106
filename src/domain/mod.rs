//! Domain Layer
//!
//! Sign resolution and parent-child compatibility, without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Small copyable types (ZodiacAnimal, Grade, Locale, Element)
//! - `entities/` - Result records (ZodiacInfo, CompatibilityResult)
//! - `services/` - Resolver, validation, compatibility engine, table audit
//! - `ports/` - The `Clock` port for the current year

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
