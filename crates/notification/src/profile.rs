/// Static company metadata interpolated into notification bodies.
#[derive(Debug, Clone)]
pub struct CompanyProfile {
    pub brand: String,
    pub india_phone: String,
    pub zambia_phone: String,
    pub support_email: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            brand: "GlobalTech&Trade".to_owned(),
            india_phone: "+91 9027125341".to_owned(),
            zambia_phone: "+260 97 7588581".to_owned(),
            support_email: "info@globaltechtrade.com".to_owned(),
        }
    }
}
