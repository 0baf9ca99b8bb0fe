code_enum! {
    /// Канал, из которого пришёл лид
    pub enum LeadSource {
        Website => "website",
        Referral => "referral",
        SocialMedia => "social_media",
        Campaign => "campaign",
        WalkIn => "walk_in",
        Other => "other",
    }
    default = Website;
}

code_enum! {
    /// Стадия работы с лидом
    pub enum LeadStatus {
        New => "new",
        Contacted => "contacted",
        Qualified => "qualified",
        Negotiation => "negotiation",
        Won => "won",
        Lost => "lost",
    }
    default = New;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip_through_serde() {
        let json = serde_json::to_string(&LeadSource::SocialMedia).unwrap();
        assert_eq!(json, "\"social_media\"");
        let back: LeadSource = serde_json::from_str("\"walk_in\"").unwrap();
        assert_eq!(back, LeadSource::WalkIn);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(LeadStatus::from_code("qualified"), Some(LeadStatus::Qualified));
        assert_eq!(LeadStatus::from_code("Qualified"), None);
        assert_eq!(LeadStatus::default(), LeadStatus::New);
        assert!(LeadStatus::CODES.iter().all(|c| LeadStatus::from_code(c).is_some()));
    }
}
