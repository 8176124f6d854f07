//! Event types and observers.
//!
//! Events decouple input handling and the window poll from the code that
//! mutates the round, rebuilds the figure or reshapes the viewport.
//!
//! Submodules:
//! - [`figure`] – remaining-guess changes and the figure rebuild
//! - [`guess`] – letter guesses and round resets
//! - [`resize`] – window resize notifications
//! - [`session`] – session phase transitions
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod figure;
pub mod guess;
pub mod resize;
pub mod session;
pub mod switchdebug;
