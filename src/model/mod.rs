/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Request descriptor and low-level HTTP dispatch
pub mod http;
/// Request bodies sent to the member API
pub mod requests;
/// Response bodies returned by the member API
pub mod responses;
