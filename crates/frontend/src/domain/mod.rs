pub mod a001_category;
pub mod a002_brand;
pub mod a003_customer;
pub mod a004_product;
pub mod a005_stock_batch;
pub mod a006_sale;
