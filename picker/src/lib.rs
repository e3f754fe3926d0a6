//! MARQ Picker
//!
//! Presentation state for the microsummary menu, kept entirely outside the
//! composer. Microsummary content arrives asynchronously from the host
//! service; completions flow through an explicit subscribe/notify channel
//! instead of an observer object, and a notification only ever mutates
//! picker state, never composer state. The composer reads nothing from
//! here; the host translates the final selection into a
//! `MicrosummaryChoice` on the field snapshot.

mod channel;
mod picker;

pub use channel::{PickerEvent, PickerEvents};
pub use picker::{MicrosummaryEntry, MicrosummaryPicker};
