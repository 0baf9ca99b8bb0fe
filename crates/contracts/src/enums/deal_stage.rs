code_enum! {
    /// Стадия сделки в воронке продаж
    pub enum DealStage {
        Prospecting => "prospecting",
        Proposal => "proposal",
        Negotiation => "negotiation",
        ClosedWon => "closed_won",
        ClosedLost => "closed_lost",
    }
    default = Prospecting;
}

impl DealStage {
    /// Сделка закрыта (успешно или нет)
    pub fn is_closed(&self) -> bool {
        matches!(self, DealStage::ClosedWon | DealStage::ClosedLost)
    }
}
