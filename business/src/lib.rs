pub mod application {
    pub mod analysis {
        pub mod analyze;
        pub mod session;
    }
    pub mod camera {
        pub mod controller;
    }
    pub mod image_search;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod analysis {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod analyze;
        }
    }
    pub mod camera {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod snapshot;
    }
    pub mod identification {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod image {
        pub mod encoder;
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod sources;
    }
    pub mod video {
        pub mod errors;
        pub mod link;
        pub mod model;
        pub mod services;
    }
}
