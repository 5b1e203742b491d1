//! Full project ports for specific targets. They pick the clock,
//! radio and diagnostic drivers and assemble the application registry.

port!(semihosted: [watch,]);
