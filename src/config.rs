// Tree printer layout constants
pub mod layout {
    // Spaces emitted per level of depth
    pub const INDENT_WIDTH: usize = 2;

    // Digits reserved for the node number; the colon follows them
    pub const NUMBER_WIDTH: usize = 3;
    pub const NUMBER_SUFFIX: &str = ":";

    // Optional segments, in the order they appear on a line
    pub const DECORATION_PREFIX: &str = "  Dec: ";
    pub const LABEL_PREFIX: &str = "  Label: ";
    pub const ADDRESS_PREFIX: &str = "  Addr: ";

    // Separates a payload kind's name from its symbol
    pub const PAYLOAD_SEPARATOR: &str = ": ";

    pub fn indentation(depth: usize) -> String {
        " ".repeat(depth * INDENT_WIDTH)
    }
}

// Tree construction constants
pub mod numbering {
    // Node numbers start here and increase by one per constructed node
    pub const FIRST_NODE_NUMBER: u32 = 1;
}
