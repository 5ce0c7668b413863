pub mod portal_fixture;
