code_enum! {
    /// Внешняя площадка, к которой подключается интеграционный аккаунт
    pub enum IntegrationPlatform {
        Facebook => "facebook",
        GoogleAds => "google_ads",
        Whatsapp => "whatsapp",
        Instagram => "instagram",
        Tiktok => "tiktok",
    }
    default = Facebook;
}
