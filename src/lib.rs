//! Flex-Grid Visual Lab (flexlab)
//!
//! TUI visual editor for CSS Flexbox and Grid container layouts. The box
//! layout is edited from a sidebar form, previewed on a canvas that
//! simulates a mobile, tablet or desktop viewport, and exported as plain CSS
//! or utility-class markup.
//!
//! Pure core (`model`, `style`, `codegen`, `viewport`, `preview`, `state`)
//! with an impure shell (`view`, `clipboard`, `logging`, `config` loading).

pub mod clipboard;
pub mod codegen;
pub mod config;
pub mod logging;
pub mod model;
pub mod preview;
pub mod state;
pub mod style;
pub mod view;
pub mod viewport;
