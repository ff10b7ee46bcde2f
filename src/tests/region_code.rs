pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn il() -> &'static str {
        "IL"
    }

    pub fn nz() -> &'static str {
        "NZ"
    }

    pub fn us() -> &'static str {
        "US"
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }

    pub fn get_unknown() -> &'static str {
        Self::zz()
    }
}
