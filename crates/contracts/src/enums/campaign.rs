code_enum! {
    /// Рекламный канал кампании
    pub enum CampaignChannel {
        Facebook => "facebook",
        Google => "google",
        Instagram => "instagram",
        Email => "email",
        Sms => "sms",
        Offline => "offline",
    }
    default = Facebook;
}

code_enum! {
    pub enum CampaignStatus {
        Draft => "draft",
        Active => "active",
        Paused => "paused",
        Completed => "completed",
    }
    default = Draft;
}
