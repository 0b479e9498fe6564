//! Shared default values for the command-line driver.
//!
//! Engine parameter defaults live in `phrasevo_sim::simulation`; only the
//! values owned by the driver itself are defined here.

pub const MAX_GENERATIONS: usize = 10_000;
pub const RECORD_EVERY: usize = 10;
pub const SHOW_TOP: usize = 0;

/// Preset targets, listed by `phrasevo quotes` and chosen with `--quote N`
/// (1-based).
pub const QUOTES: [&str; 10] = [
    "TO BE OR NOT TO BE",
    "ALL THE WORLD IS A STAGE",
    "BREVITY IS THE SOUL OF WIT",
    "TO THINE OWN SELF BE TRUE",
    "THE COURSE OF TRUE LOVE NEVER DID RUN SMOOTH",
    "SOME ARE BORN GREAT",
    "WHAT IS PAST IS PROLOGUE",
    "LOVE ALL TRUST A FEW",
    "THE BETTER PART OF VALOR IS DISCRETION",
    "GOOD NIGHT GOOD NIGHT PARTING IS SUCH SWEET SORROW",
];
