pub mod chunked_stream;
