pub mod service {
    pub mod config_service;
    pub mod rank;
    pub mod report;
    pub mod scan;
    pub mod walker;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
}

pub mod facade {
    pub mod report_facade;
    pub mod traits {
        pub mod i_report;
    }
}

pub mod models {
    pub mod rank;
    pub mod record;
    pub mod report;
    pub mod scan;
}

pub mod utils {
    pub mod utils;
}
