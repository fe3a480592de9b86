pub mod content;
pub mod copy;

pub use content::{BlogPost, HomepageFeature, SiteSetting, TeamMember};
pub use copy::CopyBundle;
