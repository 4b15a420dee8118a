mod decode;
mod routes;
