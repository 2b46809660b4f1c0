// DOM markers consumed from the host page. The page owns the elements and
// the CSS transitions; this crate only flips the markers.

// Decorative parallax layers
pub const PARTICLE_SELECTOR: &str = ".particle";

// Feature cards revealed after load
pub const FEATURE_SELECTOR: &str = ".glassmorphism-light";

// Classes that end the hidden state; the page's stylesheet animates the
// opacity/translate change.
pub const REVEAL_CLASSES: [&str; 2] = ["opacity-100", "translate-y-0"];
