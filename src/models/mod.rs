pub mod options;
pub mod qr_record;
pub mod template;
