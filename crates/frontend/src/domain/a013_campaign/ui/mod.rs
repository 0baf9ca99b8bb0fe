pub mod list;

pub use list::CampaignList;
