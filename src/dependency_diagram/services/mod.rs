mod diagram_generator;

pub use diagram_generator::DiagramGenerator;
