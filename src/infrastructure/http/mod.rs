pub mod manifest_client;
