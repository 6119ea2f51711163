//! Static company card served by `GET /api/company-info`. No storage access.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub company_name: String,
    pub slogan: String,
    pub description: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub services: Vec<String>,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            company_name: "Standeal.md".to_string(),
            slogan: "Soluții de transport profesionale în Moldova și Europa".to_string(),
            description: "Compania Standeal oferă servicii de transport profesionale cu \
                          microbuze Mercedes Sprinter pentru persoane și mărfuri în Moldova \
                          și Europa."
                .to_string(),
            phone: "+373 68 727 975".to_string(),
            email: "office@standeal.md".to_string(),
            address: "Chișinău, Moldova".to_string(),
            services: vec![
                "Transport persoane cu microbuze".to_string(),
                "Transport marfă cu microbuze Sprinter".to_string(),
                "Transport rapid național și internațional".to_string(),
                "Servicii de transport pentru evenimente".to_string(),
                "Transport de grupuri și delegații".to_string(),
            ],
        }
    }
}
