pub mod embedding_port;
