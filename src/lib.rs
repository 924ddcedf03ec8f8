pub mod prelude;

pub mod scrape {
    pub mod scraper {
        pub mod division;
        pub mod index;
        pub mod names;
    }
    pub mod france;
    pub mod page;
    pub mod record;
    pub mod util;
}

pub mod service {
    pub mod csv_service;
    pub mod scrape_service;
    pub mod var_service;
}
