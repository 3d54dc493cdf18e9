pub mod rag;
