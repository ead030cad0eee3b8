pub mod shared {
    pub mod infrastructure {
        pub mod item_store;
    }
}

pub mod modules {
    pub mod health {
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod items {
        pub mod core {
            pub mod item;
        }
        pub mod use_cases {
            pub mod list_items {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_item {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_item {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
