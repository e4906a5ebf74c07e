pub mod makeup_region;
pub mod region_mapper;
