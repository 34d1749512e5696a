//! shushu: Yi-Jing numerology engine and oracle client.
//!
//! The core is pure and synchronous: digit-sum reduction with step tracing
//! ([`reduce`]), birth-date derived numbers ([`birthdate`]), and the
//! sliding-window pair scan ([`pairs`]) over the static tables in
//! [`reference`]. Around it sit the prompt template, the typed report
//! schema, and HTTP clients for the two hosted oracle providers.

pub mod birthdate;
pub mod config;
pub mod logging;
pub mod oracle;
pub mod pairs;
pub mod prompt;
pub mod reduce;
pub mod reference;
pub mod report;
