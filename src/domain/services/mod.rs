pub mod access_policy;
