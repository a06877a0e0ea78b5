pub mod shared {
    pub mod core {
        pub mod attendance_day;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod state;
            pub mod stream;
        }
        pub mod use_cases {
            pub mod record_attendance {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_today_status {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }

    pub mod attendance_flow {
        pub mod core {
            pub mod flow_state;
            pub mod geo_point;
            pub mod geofence;
            pub mod justification;
        }
        pub mod ports {
            pub mod attendance_service;
            pub mod justification_prompt;
            pub mod location;
            pub mod reverse_geocoder;
        }
        pub mod use_cases {
            pub mod probe_location {
                pub mod probe;
            }
            pub mod check_in_out {
                pub mod controller;
                pub mod location_label;
                pub mod outcome;
                pub mod refresh;
                pub mod status_cache;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
                pub mod stdin_prompt;
            }
            pub mod outbound {
                pub mod google_reverse_geocoder;
                pub mod http_attendance_service;
                pub mod local_attendance_service;
                pub mod static_location_provider;
            }
        }
    }
}

pub mod shell;
