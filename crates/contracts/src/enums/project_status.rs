code_enum! {
    /// Стадия жизненного цикла проекта застройщика
    pub enum ProjectStatus {
        Planning => "planning",
        UnderConstruction => "under_construction",
        Completed => "completed",
        OnHold => "on_hold",
    }
    default = Planning;
}
