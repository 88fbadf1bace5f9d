pub mod frame_ops;
