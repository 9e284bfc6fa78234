//! # TUI Components
//!
//! All components here are stateless and props-based: `ui::draw_ui` builds
//! them each frame from the navigator's view state and renders them.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (deck title + "Card N / M")
//! ├── card_view.rs     (front or back of the active card)
//! ├── indicators.rs    (one clickable dot per card)
//! └── nav_bar.rs       (Prev / Flip / Next buttons)
//! ```
//!
//! Components that can be clicked expose the geometry they draw with
//! (`NavBar::button_areas`, `indicators::dot_cells`) so hit testing uses
//! exactly the same rectangles as rendering.

pub mod card_view;
pub mod indicators;
pub mod nav_bar;
mod title_bar;

pub use card_view::CardView;
pub use indicators::Indicators;
pub use nav_bar::NavBar;
pub use title_bar::TitleBar;
