code_enum! {
    pub enum UnitType {
        Apartment => "apartment",
        Villa => "villa",
        Townhouse => "townhouse",
        Office => "office",
        Retail => "retail",
        Land => "land",
    }
    default = Apartment;
}

code_enum! {
    pub enum UnitStatus {
        Available => "available",
        Reserved => "reserved",
        Sold => "sold",
        Rented => "rented",
    }
    default = Available;
}
