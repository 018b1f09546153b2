pub mod bottom_nav;

pub use bottom_nav::BottomNav;
