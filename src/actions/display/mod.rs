mod print;
mod table;

pub use crate::actions::display::{
    print::{
        print_bold,
        print_green,
        print_red,
        print_yellow,
    },
    table::print_table,
};
