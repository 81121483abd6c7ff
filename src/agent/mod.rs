pub mod stateless_llm;
